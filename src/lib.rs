pub mod shared {
    pub mod infrastructure {
        pub mod cat_store;
    }
}

pub mod modules {
    pub mod cats {
        pub mod core {
            pub mod cat;
            pub mod errors;
            pub mod identity;
        }
        pub mod use_cases {
            pub mod get_cat {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_cats {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_cat {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_cat {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod trpc;
            }
        }
    }
}

pub mod shell;

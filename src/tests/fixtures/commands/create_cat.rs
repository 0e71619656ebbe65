use crate::modules::cats::use_cases::create_cat::command::CreateCat;

pub struct CreateCatBuilder {
    inner: CreateCat,
}

impl Default for CreateCatBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateCatBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateCat {
                name: "Garfield".to_string(),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn build(self) -> CreateCat {
        self.inner
    }
}

#[cfg(test)]
mod create_cat_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_build_with_a_default_name() {
        assert_eq!(CreateCatBuilder::new().build().name, "Garfield");
    }

    #[rstest]
    fn it_should_override_the_name() {
        let command = CreateCatBuilder::new().name("Tom").build();
        assert_eq!(command, CreateCat { name: "Tom".into() });
    }
}

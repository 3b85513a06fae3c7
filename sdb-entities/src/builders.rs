pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::school_builder::*;

pub mod school_builder {

    use super::*;
    use crate::{geo::*, id::*, school::*};

    #[derive(Debug)]
    pub struct SchoolBuild {
        school: School,
    }

    impl SchoolBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.school.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.school.name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.school.address = address.into();
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.school.pos = Coordinate::new(lat, lng);
            self
        }
        pub fn finish(self) -> School {
            self.school
        }
    }

    impl Builder for School {
        type Build = SchoolBuild;
        fn build() -> SchoolBuild {
            SchoolBuild {
                school: School {
                    id: SchoolId::default(),
                    name: "".into(),
                    address: "".into(),
                    pos: Coordinate::default(),
                },
            }
        }
    }
}

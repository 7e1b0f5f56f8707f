pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::activity_builder::*;

pub mod activity_builder {

    use super::*;
    use crate::activity::*;

    #[derive(Debug)]
    pub struct ActivityBuild {
        activity: Activity,
    }

    impl ActivityBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.activity.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.activity.description = desc.into();
            self
        }
        pub fn schedule(mut self, schedule: &str) -> Self {
            self.activity.schedule = schedule.into();
            self
        }
        pub fn max_participants(mut self, max: u32) -> Self {
            self.activity.max_participants = max;
            self
        }
        pub fn participants(mut self, participants: Vec<&str>) -> Self {
            self.activity.participants = participants.into_iter().map(Into::into).collect();
            self
        }
        pub fn finish(self) -> Activity {
            self.activity
        }
    }

    impl Builder for Activity {
        type Build = ActivityBuild;
        fn build() -> ActivityBuild {
            ActivityBuild {
                activity: Activity {
                    name: "".into(),
                    description: "".into(),
                    schedule: "".into(),
                    max_participants: 1,
                    participants: vec![],
                },
            }
        }
    }
}

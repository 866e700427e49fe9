use crate::utilities::sound::{create_beeper_sound, create_rooster_sound, create_siren_sound};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlarmType {
    Siren,
    Beeper,
    Rooster,
}

impl Default for AlarmType {
    fn default() -> Self {
        AlarmType::Siren
    }
}

impl AlarmType {
    pub const ALL: [AlarmType; 3] = [AlarmType::Siren, AlarmType::Beeper, AlarmType::Rooster];

    pub fn label(&self) -> &'static str {
        match self {
            AlarmType::Siren => "Alarm 1",
            AlarmType::Beeper => "Alarm 2",
            AlarmType::Rooster => "Alarm 3",
        }
    }

    pub fn create_sound(&self) -> Vec<f32> {
        match self {
            AlarmType::Siren => create_siren_sound(),
            AlarmType::Beeper => create_beeper_sound(),
            AlarmType::Rooster => create_rooster_sound(),
        }
    }
}

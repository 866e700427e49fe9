pub mod alarm_type;
pub mod buttons;
pub mod display;
pub mod selector;
pub mod sound;
pub mod time_format;
pub mod timer;

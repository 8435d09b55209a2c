pub mod option_toggle;

pub use option_toggle::OptionToggle;

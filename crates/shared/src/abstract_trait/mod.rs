pub mod banking;

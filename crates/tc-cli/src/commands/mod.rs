pub mod bestiary;
pub mod menu;
pub mod run;

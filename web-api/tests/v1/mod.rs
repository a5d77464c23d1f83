mod helper;
mod mission;
mod vessel;


mod lobby;
mod moves;
mod persistence;

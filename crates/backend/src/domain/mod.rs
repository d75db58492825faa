pub mod a001_team;

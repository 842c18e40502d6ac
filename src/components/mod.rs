pub mod app;
mod board;
mod cell;
mod controls;
mod game;

// Application layer: the demonstration blocks the runner executes.

pub mod blocks;

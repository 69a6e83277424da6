pub mod cli;
pub mod console_interface;
pub mod core;

#[cfg(test)]
mod test;

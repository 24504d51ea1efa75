pub mod pipeline;

#[cfg(test)]
mod laws;

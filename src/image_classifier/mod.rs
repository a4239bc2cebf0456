pub mod impl_mobilenet_v2;
pub mod interface;

#[cfg(test)]
mod tests;

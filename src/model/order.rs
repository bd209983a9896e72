// src/model/order.rs

/// Identifier of the stream an order arrived on.
pub type StreamId = u8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub product: String,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(product: impl Into<String>, quantity: u32) -> Self {
        Self {
            product: product.into(),
            quantity,
        }
    }
}

/// An incoming order: a stream header plus demand lines.
/// Lines are expected to name each product at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub header: StreamId,
    pub lines: Vec<OrderLine>,
}

impl Order {
    pub fn new(header: StreamId, lines: Vec<OrderLine>) -> Self {
        Self { header, lines }
    }
}

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An address didn't refer to an occupied slot of a contiguous collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("address {address} out of bounds for collection with {len} elements")]
pub struct OutOfBounds {
    pub address: usize,
    pub len: usize,
}

/// A fixed-capacity collection had no free slot left for another element.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("capacity of {cap} elements exceeded")]
pub struct CapacityExceeded {
    pub cap: usize,
}

/// A position didn't refer to a node that could be read, spliced or unlinked.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("invalid position {position} for linked list with {len} nodes")]
pub struct InvalidPosition {
    pub position: usize,
    pub len: usize,
}

/// A line couldn't be drawn because one or both of its endpoints aren't in the graph.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("invalid line, {missing} endpoint not found in graph")]
pub struct InvalidLine {
    pub missing: Endpoint,
}

/// The endpoint(s) of a line which couldn't be found.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Endpoint {
    #[display("start")]
    Start,
    #[display("end")]
    End,
    #[display("start and end")]
    Both,
}

/// Any error produced by the collections in this crate.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, TryInto, IsVariant)]
pub enum CollectionError {
    OutOfBounds(OutOfBounds),
    CapacityExceeded(CapacityExceeded),
    InvalidPosition(InvalidPosition),
    InvalidLine(InvalidLine),
}

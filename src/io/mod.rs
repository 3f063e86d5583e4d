/*!
# IO utilities

Raw corpus decoding and merged corpus serialization.

Both edges fully materialize their document: the transform in between never
touches the filesystem.
!*/
pub mod reader;
pub mod writer;

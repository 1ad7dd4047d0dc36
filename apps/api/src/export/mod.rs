// CV Export: reshapes a stored CV into the flat document the PDF templates consume.
// Pure data mapping apart from the store reads in `normalizer`.

pub mod bullets;
pub mod dates;
pub mod document;
pub mod handlers;
pub mod mapper;
pub mod normalizer;
pub mod skills;

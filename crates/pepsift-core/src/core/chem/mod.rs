pub mod composition;
pub mod descriptors;
pub mod residues;
pub mod tables;

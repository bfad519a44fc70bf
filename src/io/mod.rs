//! io : loading graphs from csv files and dumping feature vectors.

/// csv loading of labeled graphs
pub mod csv;

/// libsvm like dump of vectors and reverse index
pub mod output;

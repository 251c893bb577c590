//! Test modules for the operator tables.

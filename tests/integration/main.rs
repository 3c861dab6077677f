//! Integration tests: input files through the partitioning pipeline.

mod pipeline_tests;

//! Unit tests for the product catalog.

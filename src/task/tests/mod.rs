//! Unit tests for the task manager.

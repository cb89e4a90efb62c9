//! Tests for basic polynomial operations.

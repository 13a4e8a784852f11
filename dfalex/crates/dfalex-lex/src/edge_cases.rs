//! Edge case tests for dfalex-lex

//! Edge case tests for calc-lex

// src/aliases.rs
//! Secret-holding types built on secure-gate
//!
//! Anything that owns raw key bytes goes through these aliases so the
//! memory is wiped when the value is dropped.

use secure_gate::fixed_alias;

fixed_alias!(Key32, 32); // 256-bit AES key

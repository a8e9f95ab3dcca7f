#![cfg(test)]

mod support;

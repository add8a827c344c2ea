// Property-based tests for countdown derivation

mod countdown_properties;

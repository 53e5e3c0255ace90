//! Comparison rules
//!
//! Each rule holds one operand and compares the candidate against it with
//! the candidate type's own `PartialEq` / `PartialOrd`. Equality is therefore
//! exactly as deep as the type defines it: element-wise for `Vec` and
//! tuples, key/value-set equality for `HashMap`, `BTreeMap` and `IndexMap`,
//! component-wise for complex numbers.

crate::rule! {
    /// Fails when the candidate equals the operand.
    ///
    /// # Examples
    ///
    /// ```
    /// use assay_validator::foundation::{Rule, ValidationState, COMPARISON_VALUE};
    /// use assay_validator::rules::not_equal;
    ///
    /// let rule = not_equal(0_i64);
    /// let mut state = ValidationState::new(&());
    ///
    /// assert!(rule.validate(&mut state, &7_i64));
    /// assert!(!state.placeholders().contains(COMPARISON_VALUE));
    ///
    /// let mut state = ValidationState::new(&());
    /// assert!(!rule.validate(&mut state, &0_i64));
    /// assert_eq!(state.placeholders().get::<i64>(COMPARISON_VALUE), Some(&0));
    /// ```
    pub NotEqual<V> { comparison_value } where C: PartialEq;
    code: "not_equal";
    template: "'$attribute_name' must not be equal to '$comparison_value'";
    rule(self, candidate) { *candidate != self.comparison_value }
    fn not_equal(value: V);
}

crate::rule! {
    /// Fails unless the candidate equals the operand.
    pub Equal<V> { comparison_value } where C: PartialEq;
    code: "equal";
    template: "'$attribute_name' must be equal to '$comparison_value'";
    rule(self, candidate) { *candidate == self.comparison_value }
    fn equal(value: V);
}

crate::rule! {
    /// Fails unless the candidate is strictly greater than the operand.
    ///
    /// Incomparable values (e.g. `NaN`) fail.
    pub GreaterThan<V> { comparison_value } where C: PartialOrd;
    code: "greater_than";
    template: "'$attribute_name' must be greater than '$comparison_value'";
    rule(self, candidate) { *candidate > self.comparison_value }
    fn greater_than(value: V);
}

crate::rule! {
    /// Fails unless the candidate is greater than or equal to the operand.
    pub GreaterThanOrEqual<V> { comparison_value } where C: PartialOrd;
    code: "greater_than_or_equal";
    template: "'$attribute_name' must be greater than or equal to '$comparison_value'";
    rule(self, candidate) { *candidate >= self.comparison_value }
    fn greater_than_or_equal(value: V);
}

crate::rule! {
    /// Fails unless the candidate is strictly less than the operand.
    pub LessThan<V> { comparison_value } where C: PartialOrd;
    code: "less_than";
    template: "'$attribute_name' must be less than '$comparison_value'";
    rule(self, candidate) { *candidate < self.comparison_value }
    fn less_than(value: V);
}

crate::rule! {
    /// Fails unless the candidate is less than or equal to the operand.
    pub LessThanOrEqual<V> { comparison_value } where C: PartialOrd;
    code: "less_than_or_equal";
    template: "'$attribute_name' must be less than or equal to '$comparison_value'";
    rule(self, candidate) { *candidate <= self.comparison_value }
    fn less_than_or_equal(value: V);
}

// ============================================================================
// TESTS
// ============================================================================

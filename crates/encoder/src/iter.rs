use std::iter::FusedIterator;

use crate::policy::EncodePolicy;
use crate::rule::RuleFlag;

/// Iterator over the rules active in an [`EncodePolicy`].
///
/// Yields rules in ascending bit order, which is the order the encoder
/// evaluates them in. Unknown bits are skipped.
#[derive(Clone, Debug)]
pub struct RuleFlagsIter {
    remaining: u32,
}

impl RuleFlagsIter {
    pub(crate) const fn new(policy: EncodePolicy) -> Self {
        Self {
            remaining: policy.bits() & EncodePolicy::KNOWN_MASK,
        }
    }
}

impl Iterator for RuleFlagsIter {
    type Item = RuleFlag;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bit = self.remaining.trailing_zeros();
        self.remaining &= !(1u32 << bit);
        RuleFlag::from_bit(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RuleFlagsIter {}

impl FusedIterator for RuleFlagsIter {}

impl DoubleEndedIterator for RuleFlagsIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bit = u32::BITS - 1 - self.remaining.leading_zeros();
        self.remaining &= !(1u32 << bit);
        RuleFlag::from_bit(bit)
    }
}

//! Equal-split settlement engine.
//!
//! A pure function of the current items/members snapshot: it owns no state,
//! performs no I/O, and never rejects its input. Malformed numeric fields
//! flow through the arithmetic untouched.

use std::cmp::Ordering;
use std::fmt;

use uuid::Uuid;

use splitcart_domain::{Member, ShoppingItem};

/// Absolute threshold below which a balance counts as settled. Absorbs
/// floating-point noise from the even division.
pub const SETTLEMENT_EPSILON: f64 = 0.01;

/// A computed directive: positive `owes` pays into the pool, negative is
/// owed money back. Never persisted; recomputed on every query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settlement {
    pub member_id: Uuid,
    pub owes: f64,
}

/// Per-member spending detail backing the settlement list.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberBreakdown {
    pub member_id: Uuid,
    pub spent: f64,
    pub owes: f64,
    /// Purchased items attributed to this member, in list order.
    pub item_ids: Vec<Uuid>,
}

impl MemberBreakdown {
    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::for_amount(self.owes)
    }
}

/// Display classification of a balance, derived from `owes` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    OwesPool,
    OwedBack,
    Settled,
}

impl BalanceStatus {
    pub fn for_amount(owes: f64) -> Self {
        if owes > SETTLEMENT_EPSILON {
            BalanceStatus::OwesPool
        } else if owes < -SETTLEMENT_EPSILON {
            BalanceStatus::OwedBack
        } else {
            BalanceStatus::Settled
        }
    }
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BalanceStatus::OwesPool => "Owes",
            BalanceStatus::OwedBack => "Owed",
            BalanceStatus::Settled => "Settled",
        };
        f.write_str(label)
    }
}

/// Complete result of a split computation.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitReport {
    pub total_cost: f64,
    pub per_person_cost: f64,
    pub per_member: Vec<MemberBreakdown>,
    /// Members with a non-settled balance, largest debtor first.
    pub settlements: Vec<Settlement>,
}

/// Stateless entry point for settlement computation.
pub struct SplitService;

impl SplitService {
    /// Computes the cost split for the given snapshot.
    ///
    /// Only purchased items count. Each purchased item contributes its
    /// effective price as a single line total; quantity is not a multiplier
    /// here (the estimated-total statistic is the place that multiplies).
    /// Zero members yields zero per-person cost and no settlements.
    pub fn compute(items: &[ShoppingItem], members: &[Member]) -> SplitReport {
        let purchased: Vec<&ShoppingItem> = items.iter().filter(|item| item.purchased).collect();

        let total_cost: f64 = purchased.iter().map(|item| item.effective_price()).sum();
        let per_person_cost = if members.is_empty() {
            0.0
        } else {
            total_cost / members.len() as f64
        };

        let per_member: Vec<MemberBreakdown> = members
            .iter()
            .map(|member| {
                let mine: Vec<&ShoppingItem> = purchased
                    .iter()
                    .copied()
                    .filter(|item| item.purchased_by == Some(member.id))
                    .collect();
                let spent: f64 = mine.iter().map(|item| item.effective_price()).sum();
                MemberBreakdown {
                    member_id: member.id,
                    spent,
                    owes: per_person_cost - spent,
                    item_ids: mine.iter().map(|item| item.id).collect(),
                }
            })
            .collect();

        let mut settlements: Vec<Settlement> = per_member
            .iter()
            .filter(|entry| entry.owes.abs() > SETTLEMENT_EPSILON)
            .map(|entry| Settlement {
                member_id: entry.member_id,
                owes: entry.owes,
            })
            .collect();
        settlements.sort_by(|a, b| b.owes.partial_cmp(&a.owes).unwrap_or(Ordering::Equal));

        SplitReport {
            total_cost,
            per_person_cost,
            per_member,
            settlements,
        }
    }
}

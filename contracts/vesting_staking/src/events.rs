use soroban_sdk::{Address, Env, Symbol};

/// Emitted once by `initialize`.
///
/// # Topics
/// * `Symbol` - "initialized"
///
/// # Data
/// * `Address` - The administrator
/// * `Address` - The staked token
/// * `u64` - The initial vesting duration
/// * `u64` - The minimum timelock delay
pub fn emit_initialized(e: &Env, admin: &Address, token: &Address, duration: u64, min_delay: u64) {
    let topics = (Symbol::new(e, "initialized"),);
    let data = (admin.clone(), token.clone(), duration, min_delay);
    e.events().publish(topics, data);
}

/// Emitted when tokens are locked for a principal.
///
/// # Topics
/// * `Symbol` - "staked"
/// * `Address` - The principal credited
///
/// # Data
/// * `Address` - The account the tokens were pulled from
/// * `i128` - The amount added
/// * `i128` - The principal's new balance
pub fn emit_staked(e: &Env, principal: &Address, payer: &Address, amount: i128, balance: i128) {
    let topics = (Symbol::new(e, "staked"), principal.clone());
    let data = (payer.clone(), amount, balance);
    e.events().publish(topics, data);
}

/// Emitted when tokens are withdrawn from a principal's stake.
///
/// # Topics
/// * `Symbol` - "unstaked"
/// * `Address` - The principal debited
///
/// # Data
/// * `Address` - The account the tokens were sent to
/// * `i128` - The amount withdrawn
/// * `i128` - The principal's remaining balance
pub fn emit_unstaked(
    e: &Env,
    principal: &Address,
    recipient: &Address,
    amount: i128,
    balance: i128,
) {
    let topics = (Symbol::new(e, "unstaked"), principal.clone());
    let data = (recipient.clone(), amount, balance);
    e.events().publish(topics, data);
}

pub fn emit_delegate_proposed(e: &Env, principal: &Address, delegate: &Address) {
    let topics = (Symbol::new(e, "delegate_proposed"), principal.clone());
    e.events().publish(topics, delegate.clone());
}

pub fn emit_delegate_set(e: &Env, principal: &Address, delegate: &Address) {
    let topics = (Symbol::new(e, "delegate_set"), principal.clone());
    e.events().publish(topics, delegate.clone());
}

pub fn emit_delegate_unset(e: &Env, principal: &Address, delegate: &Address) {
    let topics = (Symbol::new(e, "delegate_unset"), principal.clone());
    e.events().publish(topics, delegate.clone());
}

/// # Data
/// * `u64` - The requested delay
/// * `u64` - Timestamp at which the change may be committed
pub fn emit_duration_change_scheduled(e: &Env, delay: u64, effective_at: u64) {
    let topics = (Symbol::new(e, "duration_change_scheduled"),);
    e.events().publish(topics, (delay, effective_at));
}

/// # Data
/// * `u64` - The previous duration
/// * `u64` - The committed duration
pub fn emit_duration_changed(e: &Env, old_duration: u64, new_duration: u64) {
    let topics = (Symbol::new(e, "duration_changed"),);
    e.events().publish(topics, (old_duration, new_duration));
}

pub fn emit_duration_change_cancelled(e: &Env, effective_at: u64) {
    let topics = (Symbol::new(e, "duration_change_cancelled"),);
    e.events().publish(topics, effective_at);
}

use soroban_sdk::{Address, Env, Symbol};

/// Emitted after a swap has been routed through a pair.
///
/// # Topics
/// * `Symbol` - "swap"
/// * `Address` - The recipient of the output token
///
/// # Data
/// * `Address` - The pair that executed the swap
/// * `Address` - Token paid in
/// * `Address` - Token paid out
/// * `i128` - Amount paid in
/// * `i128` - Amount delivered
pub fn emit_swap(
    e: &Env,
    recipient: &Address,
    pair: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_in: i128,
    amount_out: i128,
) {
    let topics = (Symbol::new(e, "swap"), recipient.clone());
    let data = (
        pair.clone(),
        token_in.clone(),
        token_out.clone(),
        amount_in,
        amount_out,
    );
    e.events().publish(topics, data);
}

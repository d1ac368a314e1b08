//! Password generator - main generation logic.

use secrecy::SecretString;
use zeroize::Zeroizing;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::passes::{
    ClassPool, fill_minimums, fill_remainder, resolve_target_length, shuffle_until_readable,
};
use crate::random::{RandomSource, default_source};
use crate::spec::{DEFAULT_SPEC, PasswordSpec};

/// Generates a password with the default specification.
pub fn generate_password() -> String {
    generate_password_with(&DEFAULT_SPEC)
}

/// Generates a password satisfying `spec` as far as its constraints allow.
///
/// Never fails: conflicting minimums are truncated in class priority order,
/// and a spec that yields nothing at all is replaced by the default one.
pub fn generate_password_with(spec: &PasswordSpec) -> String {
    generate_password_with_rng(spec, &mut default_source())
}

/// Same as [`generate_password_with`], drawing from `rng`.
///
/// The output is fully determined by `spec` and the values `rng` yields,
/// so a seeded source reproduces the same password.
///
/// # Arguments
/// * `spec` - The requirements the password should meet
/// * `rng` - Source of every random choice, including the fallback
///
/// # Returns
/// The generated password; never empty.
pub fn generate_password_with_rng<R: RandomSource + ?Sized>(
    spec: &PasswordSpec,
    rng: &mut R,
) -> String {
    generate_chars(spec, rng).iter().collect()
}

/// Generates a password wrapped in a [`SecretString`].
pub fn generate_secret_password(spec: &PasswordSpec) -> SecretString {
    secret_from_chars(&generate_chars(spec, &mut default_source()))
}

/// Async version that sends the generated password via channel.
#[cfg(feature = "async")]
pub async fn generate_password_tx(spec: PasswordSpec, tx: mpsc::Sender<SecretString>) {
    #[cfg(feature = "tracing")]
    tracing::info!("password generation is about to start...");

    let password = generate_secret_password(&spec);

    if let Err(e) = tx.send(password).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send generated password: {}", e);
    }
}

/// Runs the generator once, then once more with the default spec if the
/// first run produced nothing.
fn generate_chars<R: RandomSource + ?Sized>(
    spec: &PasswordSpec,
    rng: &mut R,
) -> Zeroizing<Vec<char>> {
    let password = generate_max_entropy_password(spec, rng);
    if !password.is_empty() {
        return password;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("Specification produced an empty password, using the default one");

    generate_max_entropy_password(&DEFAULT_SPEC, rng)
}

/// Copies `chars` into a secret string sized up front, so no intermediate
/// buffer is left behind by reallocation.
fn secret_from_chars(chars: &[char]) -> SecretString {
    let len = chars.iter().map(|c| c.len_utf8()).sum::<usize>();
    let mut password = String::with_capacity(len);
    password.extend(chars.iter());
    SecretString::new(password.into_boxed_str())
}

fn generate_max_entropy_password<R: RandomSource + ?Sized>(
    spec: &PasswordSpec,
    rng: &mut R,
) -> Zeroizing<Vec<char>> {
    let target = resolve_target_length(spec.min_length, spec.max_length);
    let pools = ClassPool::from_spec(spec);
    let capacity = ClassPool::reachable_len(&pools, target);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Generating password with target length {} (at most {} reachable)",
        target,
        capacity
    );

    // Never grows past its capacity, and is wiped on drop.
    let mut buffer: Zeroizing<Vec<char>> = Zeroizing::new(Vec::with_capacity(capacity));

    fill_minimums(&pools, &mut buffer, target, rng);
    let filled = fill_remainder(&pools, &mut buffer, target, rng);
    let attempts = shuffle_until_readable(&mut buffer, rng);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Generated {} of {} characters (target reached: {}) after {} shuffle pass(es)",
        buffer.len(),
        target,
        filled,
        attempts
    );
    #[cfg(not(feature = "tracing"))]
    let _ = (filled, attempts);

    buffer
}

use serde::Deserialize;
use serde::Deserializer;

/// Deserialize a nullable JSON value, mapping `null` to `T::default()`
///
/// The provider reports unknown supplies and stale quote fields as `null`
/// (e.g. `max_supply` for currencies without a cap).
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

use polars::prelude::*;

/// Drops the named columns from the frame where present. Columns already
/// absent are skipped, so pruning an already-pruned frame is a no-op.
pub(crate) fn prune_columns(df: DataFrame, names: &[&str]) -> DataFrame {
    df.drop_many(names.iter().copied())
}

use anyhow::{Result, bail};
use std::{cmp::Ordering, fmt::Debug, ops::RangeBounds};

pub fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {:?}, but is {:?}", range, num);
    }

    Ok(())
}

/// Return `val` if it is not less than `lower`.
pub fn check_greater_than<T>(val: T, name: &str, lower: T) -> Result<T>
where
    T: PartialOrd + Debug,
{
    if val < lower {
        bail!("{name} is {val:?}, which is less than {lower:?}");
    }

    Ok(val)
}

/// Return `val` if it is not greater than `upper`.
pub fn check_less_than<T>(val: T, name: &str, upper: T) -> Result<T>
where
    T: PartialOrd + Debug,
{
    if val > upper {
        bail!("{name} is {val:?}, which is greater than {upper:?}");
    }

    Ok(val)
}

pub fn check_in_range<T>(val: T, name: &str, lower: T, upper: T) -> Result<T>
where
    T: PartialOrd + Debug,
{
    check_less_than(check_greater_than(val, name, lower)?, name, upper)
}

pub fn check_positive<T>(val: T, name: &str) -> Result<T>
where
    T: PartialOrd + Debug + Default,
{
    check_greater_than(val, name, T::default())
}

pub fn check_negative<T>(val: T, name: &str) -> Result<T>
where
    T: PartialOrd + Debug + Default,
{
    check_less_than(val, name, T::default())
}

/// Order `(time, level)` samples by level.
pub fn by_level(a: &(f64, f64), b: &(f64, f64)) -> Ordering {
    a.1.total_cmp(&b.1)
}

/// Order `(time, level)` samples by the distance of their level to `reference`.
pub fn by_distance_from(reference: f64) -> impl Fn(&(f64, f64), &(f64, f64)) -> Ordering {
    move |a, b| (a.1 - reference).abs().total_cmp(&(b.1 - reference).abs())
}

/// Sample whose level lies closest to `reference`.
pub fn nearest_to(samples: &[(f64, f64)], reference: f64) -> Option<(f64, f64)> {
    let cmp = by_distance_from(reference);
    samples.iter().copied().min_by(|a, b| cmp(a, b))
}

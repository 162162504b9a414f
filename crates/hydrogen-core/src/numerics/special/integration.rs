#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapezoidInput<'a> {
    pub abscissa: &'a [f64],
    pub ordinate: &'a [f64],
}

impl<'a> TrapezoidInput<'a> {
    pub fn new(abscissa: &'a [f64], ordinate: &'a [f64]) -> Self {
        Self { abscissa, ordinate }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrapezoidError {
    #[error("trapezoid integration requires at least 2 points, got {actual}")]
    InsufficientPoints { actual: usize },
    #[error("trapezoid input length mismatch: abscissa={abscissa}, ordinate={ordinate}")]
    LengthMismatch { abscissa: usize, ordinate: usize },
    #[error(
        "trapezoid abscissa must be strictly increasing, index {index} has {current} after {previous}"
    )]
    NonIncreasingAbscissa {
        index: usize,
        previous: f64,
        current: f64,
    },
    #[error("trapezoid vector '{field}' must contain finite values, index {index} got {value}")]
    NonFiniteValue {
        field: &'static str,
        index: usize,
        value: f64,
    },
}

/// Composite trapezoid rule over an arbitrary strictly increasing grid.
pub fn integrate_trapezoid(input: TrapezoidInput<'_>) -> Result<f64, TrapezoidError> {
    validate_input(input)?;

    let mut sum = 0.0;
    let mut correction = 0.0;
    for (x, y) in input
        .abscissa
        .windows(2)
        .zip(input.ordinate.windows(2))
    {
        kahan_add(&mut sum, &mut correction, 0.5 * (x[1] - x[0]) * (y[0] + y[1]));
    }

    Ok(sum)
}

fn validate_input(input: TrapezoidInput<'_>) -> Result<(), TrapezoidError> {
    if input.abscissa.len() != input.ordinate.len() {
        return Err(TrapezoidError::LengthMismatch {
            abscissa: input.abscissa.len(),
            ordinate: input.ordinate.len(),
        });
    }
    if input.abscissa.len() < 2 {
        return Err(TrapezoidError::InsufficientPoints {
            actual: input.abscissa.len(),
        });
    }

    for (field, values) in [("abscissa", input.abscissa), ("ordinate", input.ordinate)] {
        if let Some((index, value)) = values
            .iter()
            .copied()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(TrapezoidError::NonFiniteValue {
                field,
                index,
                value,
            });
        }
    }

    for index in 1..input.abscissa.len() {
        let previous = input.abscissa[index - 1];
        let current = input.abscissa[index];
        if current <= previous {
            return Err(TrapezoidError::NonIncreasingAbscissa {
                index,
                previous,
                current,
            });
        }
    }

    Ok(())
}

fn kahan_add(sum: &mut f64, correction: &mut f64, value: f64) {
    let corrected = value - *correction;
    let next = *sum + corrected;
    *correction = (next - *sum) - corrected;
    *sum = next;
}

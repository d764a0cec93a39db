use knuffel::errors::DecodeError;

/// A number that may be written as either an integer or a decimal in the config.
///
/// Values are checked against the inclusive `MIN..=MAX` range.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FloatOrInt<const MIN: i32, const MAX: i32>(pub f64);

/// Strictly positive item dimension in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension(f64);

/// Largest accepted item dimension.
pub const MAX_DIMENSION: f64 = 65535.;

impl Dimension {
    /// Returns `None` unless `value` is finite, positive and at most [`MAX_DIMENSION`].
    pub fn new(value: f64) -> Option<Self> {
        (value > 0. && value <= MAX_DIMENSION).then_some(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

fn check_no_type_name<S: knuffel::traits::ErrorSpan>(
    type_name: &Option<knuffel::span::Spanned<knuffel::ast::TypeName, S>>,
    ctx: &mut knuffel::decode::Context<S>,
) {
    if let Some(type_name) = &type_name {
        ctx.emit_error(DecodeError::unexpected(
            type_name,
            "type name",
            "no type name expected for this node",
        ));
    }
}

fn decode_number<S: knuffel::traits::ErrorSpan>(
    val: &knuffel::span::Spanned<knuffel::ast::Literal, S>,
    ctx: &mut knuffel::decode::Context<S>,
) -> Option<f64> {
    match &**val {
        knuffel::ast::Literal::Int(ref v) => match v.try_into() {
            Ok(v) => {
                let v: i32 = v;
                Some(f64::from(v))
            }
            Err(e) => {
                ctx.emit_error(DecodeError::conversion(val, e));
                None
            }
        },
        knuffel::ast::Literal::Decimal(ref v) => match v.try_into() {
            Ok(v) => {
                let v: f64 = v;
                Some(v)
            }
            Err(e) => {
                ctx.emit_error(DecodeError::conversion(val, e));
                None
            }
        },
        _ => {
            ctx.emit_error(DecodeError::unsupported(
                val,
                "Unsupported value, only numbers are recognized",
            ));
            None
        }
    }
}

impl<S: knuffel::traits::ErrorSpan, const MIN: i32, const MAX: i32> knuffel::DecodeScalar<S>
    for FloatOrInt<MIN, MAX>
{
    fn type_check(
        type_name: &Option<knuffel::span::Spanned<knuffel::ast::TypeName, S>>,
        ctx: &mut knuffel::decode::Context<S>,
    ) {
        check_no_type_name(type_name, ctx);
    }

    fn raw_decode(
        val: &knuffel::span::Spanned<knuffel::ast::Literal, S>,
        ctx: &mut knuffel::decode::Context<S>,
    ) -> Result<Self, DecodeError<S>> {
        let Some(v) = decode_number(val, ctx) else {
            return Ok(Self::default());
        };

        if (f64::from(MIN)..=f64::from(MAX)).contains(&v) {
            Ok(FloatOrInt(v))
        } else {
            ctx.emit_error(DecodeError::conversion(
                val,
                format!("value must be between {MIN} and {MAX}"),
            ));
            Ok(Self::default())
        }
    }
}

impl<S: knuffel::traits::ErrorSpan> knuffel::DecodeScalar<S> for Dimension {
    fn type_check(
        type_name: &Option<knuffel::span::Spanned<knuffel::ast::TypeName, S>>,
        ctx: &mut knuffel::decode::Context<S>,
    ) {
        check_no_type_name(type_name, ctx);
    }

    fn raw_decode(
        val: &knuffel::span::Spanned<knuffel::ast::Literal, S>,
        ctx: &mut knuffel::decode::Context<S>,
    ) -> Result<Self, DecodeError<S>> {
        // The placeholder is never observed: an emitted error fails the whole parse.
        let placeholder = Dimension(1.);

        let Some(v) = decode_number(val, ctx) else {
            return Ok(placeholder);
        };

        match Dimension::new(v) {
            Some(dim) => Ok(dim),
            None => {
                ctx.emit_error(DecodeError::conversion(
                    val,
                    format!("dimension must be greater than 0 and at most {MAX_DIMENSION}"),
                ));
                Ok(placeholder)
            }
        }
    }
}

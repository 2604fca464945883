//! Easing curves mapping a normalized time in `[0, 1]` to a progress value.
//!
//! All curves satisfy `f(0) = 0` and `f(1) = 1`. Back, elastic and bounce
//! curves leave `[0, 1]` in between. Formulas follow <https://easings.net>.

use serde::{Deserialize, Serialize};

use crate::Scalar;

pub fn sine_in<T: Scalar>(t: T) -> T {
  T::one() - (t * T::FRAC_PI_2()).cos()
}

pub fn sine_out<T: Scalar>(t: T) -> T {
  (t * T::FRAC_PI_2()).sin()
}

pub fn sine_in_out<T: Scalar>(t: T) -> T {
  -((T::PI() * t).cos() - T::one()) * T::half()
}

macro_rules! power_easing {
  ($name:ident, $power:expr) => {
    paste::paste! {
      pub fn [<$name _in>]<T: Scalar>(t: T) -> T {
        t.powi($power)
      }

      pub fn [<$name _out>]<T: Scalar>(t: T) -> T {
        T::one() - (T::one() - t).powi($power)
      }

      pub fn [<$name _in_out>]<T: Scalar>(t: T) -> T {
        if t < T::half() {
          T::two().powi($power - 1) * t.powi($power)
        } else {
          T::one() - (T::two() - T::two() * t).powi($power) * T::half()
        }
      }
    }
  };
}

power_easing!(quad, 2);
power_easing!(cubic, 3);
power_easing!(quart, 4);
power_easing!(quint, 5);

pub fn expo_in<T: Scalar>(t: T) -> T {
  if t == T::zero() {
    T::zero()
  } else {
    T::two().powf(T::eval(10.) * t - T::eval(10.))
  }
}

pub fn expo_out<T: Scalar>(t: T) -> T {
  if t == T::one() {
    T::one()
  } else {
    T::one() - T::two().powf(T::eval(-10.) * t)
  }
}

pub fn expo_in_out<T: Scalar>(t: T) -> T {
  if t == T::zero() {
    T::zero()
  } else if t == T::one() {
    T::one()
  } else if t < T::half() {
    T::two().powf(T::eval(20.) * t - T::eval(10.)) * T::half()
  } else {
    (T::two() - T::two().powf(T::eval(-20.) * t + T::eval(10.))) * T::half()
  }
}

pub fn circ_in<T: Scalar>(t: T) -> T {
  T::one() - (T::one() - t * t).sqrt()
}

pub fn circ_out<T: Scalar>(t: T) -> T {
  let t = t - T::one();
  (T::one() - t * t).sqrt()
}

pub fn circ_in_out<T: Scalar>(t: T) -> T {
  if t < T::half() {
    let t = T::two() * t;
    (T::one() - (T::one() - t * t).sqrt()) * T::half()
  } else {
    let t = T::two() - T::two() * t;
    ((T::one() - t * t).sqrt() + T::one()) * T::half()
  }
}

const BACK_C1: f64 = 1.70158;
const BACK_C2: f64 = BACK_C1 * 1.525;
const BACK_C3: f64 = BACK_C1 + 1.;

pub fn back_in<T: Scalar>(t: T) -> T {
  let c1 = T::eval(BACK_C1);
  let c3 = T::eval(BACK_C3);
  c3 * t * t * t - c1 * t * t
}

pub fn back_out<T: Scalar>(t: T) -> T {
  let c1 = T::eval(BACK_C1);
  let c3 = T::eval(BACK_C3);
  let t = t - T::one();
  T::one() + c3 * t * t * t + c1 * t * t
}

pub fn back_in_out<T: Scalar>(t: T) -> T {
  let c2 = T::eval(BACK_C2);
  if t < T::half() {
    let t2 = T::two() * t;
    t2 * t2 * ((c2 + T::one()) * t2 - c2) * T::half()
  } else {
    let t2 = T::two() * t - T::two();
    (t2 * t2 * ((c2 + T::one()) * t2 + c2) + T::two()) * T::half()
  }
}

pub fn elastic_in<T: Scalar>(t: T) -> T {
  if t == T::zero() || t == T::one() {
    return t;
  }
  let c4 = T::two() * T::PI() / T::eval(3.);
  let ten = T::eval(10.);
  -T::two().powf(ten * t - ten) * ((t * ten - T::eval(10.75)) * c4).sin()
}

pub fn elastic_out<T: Scalar>(t: T) -> T {
  if t == T::zero() || t == T::one() {
    return t;
  }
  let c4 = T::two() * T::PI() / T::eval(3.);
  let ten = T::eval(10.);
  T::two().powf(-ten * t) * ((t * ten - T::eval(0.75)) * c4).sin() + T::one()
}

pub fn elastic_in_out<T: Scalar>(t: T) -> T {
  if t == T::zero() || t == T::one() {
    return t;
  }
  let c5 = T::two() * T::PI() / T::eval(4.5);
  let twenty = T::eval(20.);
  let ten = T::eval(10.);
  let wave = ((twenty * t - T::eval(11.125)) * c5).sin();
  if t < T::half() {
    -(T::two().powf(twenty * t - ten) * wave) * T::half()
  } else {
    T::two().powf(-twenty * t + ten) * wave * T::half() + T::one()
  }
}

pub fn bounce_out<T: Scalar>(t: T) -> T {
  let n1 = T::eval(7.5625);
  let d1 = T::eval(2.75);
  if t < T::one() / d1 {
    n1 * t * t
  } else if t < T::two() / d1 {
    let t = t - T::eval(1.5) / d1;
    n1 * t * t + T::eval(0.75)
  } else if t < T::eval(2.5) / d1 {
    let t = t - T::eval(2.25) / d1;
    n1 * t * t + T::eval(0.9375)
  } else {
    let t = t - T::eval(2.625) / d1;
    n1 * t * t + T::eval(0.984375)
  }
}

pub fn bounce_in<T: Scalar>(t: T) -> T {
  T::one() - bounce_out(T::one() - t)
}

pub fn bounce_in_out<T: Scalar>(t: T) -> T {
  if t < T::half() {
    (T::one() - bounce_out(T::one() - T::two() * t)) * T::half()
  } else {
    (T::one() + bounce_out(T::two() * t - T::one())) * T::half()
  }
}

macro_rules! easing_kinds {
  ($($curve:ident),+ $(,)?) => {
    paste::paste! {
      /// Every curve of this module as a value, for data driven animation.
      #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
      pub enum Easing {
        Linear,
        $([<$curve:camel>],)+
      }

      impl Easing {
        pub const ALL: &'static [Easing] = &[Easing::Linear, $(Easing::[<$curve:camel>],)+];

        pub fn apply<T: Scalar>(self, t: T) -> T {
          match self {
            Easing::Linear => t,
            $(Easing::[<$curve:camel>] => $curve(t),)+
          }
        }
      }
    }
  };
}

easing_kinds!(
  sine_in,
  sine_out,
  sine_in_out,
  quad_in,
  quad_out,
  quad_in_out,
  cubic_in,
  cubic_out,
  cubic_in_out,
  quart_in,
  quart_out,
  quart_in_out,
  quint_in,
  quint_out,
  quint_in_out,
  expo_in,
  expo_out,
  expo_in_out,
  circ_in,
  circ_out,
  circ_in_out,
  back_in,
  back_out,
  back_in_out,
  elastic_in,
  elastic_out,
  elastic_in_out,
  bounce_in,
  bounce_out,
  bounce_in_out,
);

//! Composite shapes of the `C-Source` module.
//!
//! Each shape is a fixed traversal: fields are written and read in declaration order, with no
//! presence bits and no padding. Choices carry a one-byte tag, bounded sequences a two-byte
//! quantity prefix, and nothing else is framed.

use crate::{
    cursor::{Decoder, Encoder},
    entry::entry_points,
    types::{
        choice::{enumerated, tag},
        sequence::{BoundedVec, FixedSeq},
    },
    EncodeSize, Error, FixedSize, Read, Write,
};

/// Size of [`A::l`].
pub const A_L_SIZE: usize = 11;

/// Maximum number of elements in a [`C`].
pub const C_CAPACITY: usize = 2;

/// Maximum number of elements in a [`D`].
pub const D_CAPACITY: usize = 10;

/// Maximum number of elements in [`DA::e`].
pub const D_A_E_CAPACITY: usize = 4;

/// Size of [`DG::l`].
pub const D_G_L_SIZE: usize = 2;

/// Size of [`DMP::q`].
pub const D_M_P_Q_SIZE: usize = 5;

/// Maximum number of elements in an [`F`].
pub const F_CAPACITY: usize = 2;

/// Number of elements in each inner sequence of an [`F`].
pub const F_INNER_LEN: usize = 1;

/// Every fixed-width scalar, in declaration order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct A {
    pub a: i8,
    pub b: i16,
    pub c: i32,
    pub d: i64,
    pub e: u8,
    pub f: u16,
    pub g: u32,
    pub h: u64,
    pub i: f32,
    pub j: f64,
    pub k: bool,
    pub l: [u8; A_L_SIZE],
}

impl Write for A {
    fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        self.a.write(encoder)?;
        self.b.write(encoder)?;
        self.c.write(encoder)?;
        self.d.write(encoder)?;
        self.e.write(encoder)?;
        self.f.write(encoder)?;
        self.g.write(encoder)?;
        self.h.write(encoder)?;
        self.i.write(encoder)?;
        self.j.write(encoder)?;
        self.k.write(encoder)?;
        self.l.write(encoder)
    }
}

impl Read for A {
    fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error> {
        Ok(Self {
            a: i8::read(decoder)?,
            b: i16::read(decoder)?,
            c: i32::read(decoder)?,
            d: i64::read(decoder)?,
            e: u8::read(decoder)?,
            f: u16::read(decoder)?,
            g: u32::read(decoder)?,
            h: u64::read(decoder)?,
            i: f32::read(decoder)?,
            j: f64::read(decoder)?,
            k: bool::read(decoder)?,
            l: <[u8; A_L_SIZE]>::read(decoder)?,
        })
    }
}

impl FixedSize for A {
    const SIZE: usize = i8::SIZE
        + i16::SIZE
        + i32::SIZE
        + i64::SIZE
        + u8::SIZE
        + u16::SIZE
        + u32::SIZE
        + u64::SIZE
        + f32::SIZE
        + f64::SIZE
        + bool::SIZE
        + A_L_SIZE;
}

/// Choice between a small integer, an [`A`], and nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum B {
    A(i8),
    B(A),
    #[default]
    C,
}

impl B {
    pub const TAG_A: u8 = tag(0);
    pub const TAG_B: u8 = tag(1);
    pub const TAG_C: u8 = tag(2);
}

impl Write for B {
    fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        match self {
            Self::A(value) => {
                encoder.put_u8(Self::TAG_A)?;
                value.write(encoder)
            }
            Self::B(value) => {
                encoder.put_u8(Self::TAG_B)?;
                value.write(encoder)
            }
            Self::C => encoder.put_u8(Self::TAG_C),
        }
    }
}

impl Read for B {
    fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error> {
        let tag = decoder.get_u8()?;
        match tag {
            Self::TAG_A => Ok(Self::A(i8::read(decoder)?)),
            Self::TAG_B => Ok(Self::B(A::read(decoder)?)),
            Self::TAG_C => Ok(Self::C),
            _ => Err(decoder.abort(Error::BadChoice(tag))),
        }
    }
}

impl EncodeSize for B {
    fn encode_size(&self) -> usize {
        1 + match self {
            Self::A(value) => value.encode_size(),
            Self::B(value) => value.encode_size(),
            Self::C => 0,
        }
    }
}

/// Up to two [`B`]s.
pub type C = BoundedVec<B, C_CAPACITY>;

/// Up to ten [`DElement`]s.
pub type D = BoundedVec<DElement, D_CAPACITY>;

/// Element of a [`D`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct DElement {
    pub a: DA,
    pub g: DG,
    pub m: DM,
}

/// First member of a [`DElement`]: a choice and a sequence of NULLs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct DA {
    pub b: DAB,
    pub e: BoundedVec<(), D_A_E_CAPACITY>,
}

/// Choice inside a [`DA`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum DAB {
    C(u8),
    D(bool),
}

impl DAB {
    pub const TAG_C: u8 = tag(0);
    pub const TAG_D: u8 = tag(1);
}

impl Default for DAB {
    fn default() -> Self {
        Self::C(0)
    }
}

enumerated! {
    /// Enumeration inside a [`DG`].
    pub enum DGH { I, J, K }
}

/// Second member of a [`DElement`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct DG {
    pub h: DGH,
    pub l: [u8; D_G_L_SIZE],
}

/// Trailing member of a [`DElement`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct DM {
    pub n: bool,
    pub o: i8,
    pub p: DMP,
}

/// Innermost member of a [`DM`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct DMP {
    pub q: [u8; D_M_P_Q_SIZE],
    pub r: bool,
}

impl Write for DElement {
    fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        self.a.write(encoder)?;
        self.g.write(encoder)?;
        self.m.write(encoder)
    }
}

impl Read for DElement {
    fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error> {
        Ok(Self {
            a: DA::read(decoder)?,
            g: DG::read(decoder)?,
            m: DM::read(decoder)?,
        })
    }
}

impl EncodeSize for DElement {
    fn encode_size(&self) -> usize {
        self.a.encode_size() + DG::SIZE + DM::SIZE
    }
}

impl Write for DA {
    fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        self.b.write(encoder)?;
        self.e.write(encoder)
    }
}

impl Read for DA {
    fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error> {
        Ok(Self {
            b: DAB::read(decoder)?,
            e: BoundedVec::read(decoder)?,
        })
    }
}

impl EncodeSize for DA {
    fn encode_size(&self) -> usize {
        DAB::SIZE + self.e.encode_size()
    }
}

impl Write for DAB {
    fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        match self {
            Self::C(value) => {
                encoder.put_u8(Self::TAG_C)?;
                value.write(encoder)
            }
            Self::D(value) => {
                encoder.put_u8(Self::TAG_D)?;
                value.write(encoder)
            }
        }
    }
}

impl Read for DAB {
    fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error> {
        let tag = decoder.get_u8()?;
        match tag {
            Self::TAG_C => Ok(Self::C(u8::read(decoder)?)),
            Self::TAG_D => Ok(Self::D(bool::read(decoder)?)),
            _ => Err(decoder.abort(Error::BadChoice(tag))),
        }
    }
}

// Both alternatives carry a single byte.
impl FixedSize for DAB {
    const SIZE: usize = 2;
}

impl Write for DG {
    fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        self.h.write(encoder)?;
        self.l.write(encoder)
    }
}

impl Read for DG {
    fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error> {
        Ok(Self {
            h: DGH::read(decoder)?,
            l: <[u8; D_G_L_SIZE]>::read(decoder)?,
        })
    }
}

impl FixedSize for DG {
    const SIZE: usize = DGH::SIZE + D_G_L_SIZE;
}

impl Write for DM {
    fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        self.n.write(encoder)?;
        self.o.write(encoder)?;
        self.p.write(encoder)
    }
}

impl Read for DM {
    fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error> {
        Ok(Self {
            n: bool::read(decoder)?,
            o: i8::read(decoder)?,
            p: DMP::read(decoder)?,
        })
    }
}

impl FixedSize for DM {
    const SIZE: usize = bool::SIZE + i8::SIZE + DMP::SIZE;
}

impl Write for DMP {
    fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        self.q.write(encoder)?;
        self.r.write(encoder)
    }
}

impl Read for DMP {
    fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error> {
        Ok(Self {
            q: <[u8; D_M_P_Q_SIZE]>::read(decoder)?,
            r: bool::read(decoder)?,
        })
    }
}

impl FixedSize for DMP {
    const SIZE: usize = D_M_P_Q_SIZE + bool::SIZE;
}

/// Sequence holding a two-level choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct E {
    pub a: EA,
}

/// Outer choice of an [`E`]; its only alternative wraps an [`EAB`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum EA {
    B(EAB),
}

impl EA {
    pub const TAG_B: u8 = tag(0);
}

impl Default for EA {
    fn default() -> Self {
        Self::B(EAB::default())
    }
}

/// Inner choice of an [`E`]; its only alternative holds a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum EAB {
    C(bool),
}

impl EAB {
    pub const TAG_C: u8 = tag(0);
}

impl Default for EAB {
    fn default() -> Self {
        Self::C(false)
    }
}

impl Write for E {
    fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        self.a.write(encoder)
    }
}

impl Read for E {
    fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error> {
        Ok(Self {
            a: EA::read(decoder)?,
        })
    }
}

impl FixedSize for E {
    const SIZE: usize = EA::SIZE;
}

impl Write for EA {
    fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        match self {
            Self::B(value) => {
                encoder.put_u8(Self::TAG_B)?;
                value.write(encoder)
            }
        }
    }
}

impl Read for EA {
    fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error> {
        let tag = decoder.get_u8()?;
        match tag {
            Self::TAG_B => Ok(Self::B(EAB::read(decoder)?)),
            _ => Err(decoder.abort(Error::BadChoice(tag))),
        }
    }
}

impl FixedSize for EA {
    const SIZE: usize = 1 + EAB::SIZE;
}

impl Write for EAB {
    fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        match self {
            Self::C(value) => {
                encoder.put_u8(Self::TAG_C)?;
                value.write(encoder)
            }
        }
    }
}

impl Read for EAB {
    fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error> {
        let tag = decoder.get_u8()?;
        match tag {
            Self::TAG_C => Ok(Self::C(bool::read(decoder)?)),
            _ => Err(decoder.abort(Error::BadChoice(tag))),
        }
    }
}

impl FixedSize for EAB {
    const SIZE: usize = 1 + bool::SIZE;
}

/// Up to two sequences of exactly one boolean each.
pub type F = BoundedVec<FixedSeq<bool, F_INNER_LEN>, F_CAPACITY>;

/// Nine booleans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct G {
    pub a: bool,
    pub b: bool,
    pub c: bool,
    pub d: bool,
    pub e: bool,
    pub f: bool,
    pub g: bool,
    pub h: bool,
    pub i: bool,
}

impl Write for G {
    fn write(&self, encoder: &mut Encoder<'_>) -> Result<(), Error> {
        for value in [
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h, self.i,
        ] {
            value.write(encoder)?;
        }
        Ok(())
    }
}

impl Read for G {
    fn read(decoder: &mut Decoder<'_>) -> Result<Self, Error> {
        Ok(Self {
            a: bool::read(decoder)?,
            b: bool::read(decoder)?,
            c: bool::read(decoder)?,
            d: bool::read(decoder)?,
            e: bool::read(decoder)?,
            f: bool::read(decoder)?,
            g: bool::read(decoder)?,
            h: bool::read(decoder)?,
            i: bool::read(decoder)?,
        })
    }
}

impl FixedSize for G {
    const SIZE: usize = 9 * bool::SIZE;
}

entry_points! {
    a => A,
    b => B,
    c => C,
    d => D,
    e => E,
    f => F,
    g => G,
}

// Copyright 2015-2020 Aerospike, Inc.
//
// Portions may be licensed to Aerospike, Inc. under one or more contributor
// license agreements.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License. You may obtain a copy of
// the License at http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations under
// the License.

use std::collections::HashMap;

use crate::{
    commands::ParticleType,
    msgpack::{encoder, Sink, Write},
    Value,
};

pub(crate) enum Argument<'a> {
    Byte(u8),
    Int(i64),
    Bool(bool),
    Value(&'a Value),
    List(&'a [Value]),
    Map(&'a HashMap<Value, Value>),
}

/// Which msgpack encoding a `cdt::Operation` should use. Each variant corresponds to one of
/// the free functions in `msgpack::encoder`.
#[derive(Clone, Copy)]
pub(crate) enum Encoder {
    Cdt,
    CdtBit,
    Hll,
}

/// A CDT (list/map/bitwise/HLL) sub-operation nested inside a bin-level `Operation`.
pub(crate) struct Operation<'a> {
    pub op: u8,
    pub encoder: Encoder,
    pub args: Vec<Argument<'a>>,
}

/// One level of nested CDT context (e.g. addressing a list nested inside a map).
pub(crate) struct Context {
    pub id: u8,
    pub flags: u8,
    pub value: Value,
}

/// No nested context; the operation applies to the top-level bin value.
pub(crate) const DEFAULT_CTX: &[Context] = &[];

impl<'a> Operation<'a> {
    #[must_use]
    pub const fn particle_type() -> ParticleType {
        ParticleType::Blob
    }

    pub fn estimate_size(&self, ctx: &[Context]) -> usize {
        self.pack(&mut Sink, ctx)
    }

    pub fn write_to(&self, w: &mut impl Write, ctx: &[Context]) -> usize {
        self.pack(w, ctx)
    }

    fn pack(&self, w: &mut impl Write, ctx: &[Context]) -> usize {
        match self.encoder {
            Encoder::Cdt => encoder::pack_cdt_op(w, self, ctx),
            Encoder::CdtBit => encoder::pack_cdt_bit_op(w, self, ctx),
            Encoder::Hll => encoder::pack_hll_op(w, self, ctx),
        }
    }
}

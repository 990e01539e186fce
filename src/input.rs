// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Decoding of byte streams into `char` input symbols.

use std::io::{self, Read};

use encode_unicode::{U8UtfExt, Utf8Char};
use error::{Error, Result};

/// An iterator that converts bytes to utf8 `char` symbols.
///
/// # Errors
/// The iterator produces an `Error::InvalidInput` item whenever the
/// underlying iterator produces an error, ends in the middle of a multibyte
/// utf8 `char`, or produces a byte sequence that is not a valid utf8
/// encoded `char`. The message names the byte offset of the offending
/// `char`.
pub struct Utf8Symbols<I>
where
    I: Iterator<Item = io::Result<u8>>,
{
    inner: I,
    offset: usize,
}

impl<I> Utf8Symbols<I>
where
    I: Iterator<Item = io::Result<u8>>,
{
    /// Create a new `Utf8Symbols` over the given bytes iterator.
    pub fn new(iter: I) -> Utf8Symbols<I> {
        Utf8Symbols {
            inner: iter,
            offset: 0,
        }
    }
}

impl<I> Iterator for Utf8Symbols<I>
where
    I: Iterator<Item = io::Result<u8>>,
{
    type Item = Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.offset;

        match self.inner.next() {
            None => None,
            Some(Err(e)) => Some(Err(invalid_input(offset, &e.to_string()))),
            Some(Ok(first)) => {
                let result = extract_utf8_char(first, &mut self.inner)
                    .map_err(|message| invalid_input(offset, &message));
                if let Ok(c) = result {
                    self.offset += c.len_utf8();
                }
                Some(result)
            }
        }
    }
}

fn invalid_input(offset: usize, message: &str) -> Error {
    Error::InvalidInput(format!("{} at byte {}", message, offset))
}

fn extract_utf8_char<I>(first: u8, iter: &mut I) -> ::std::result::Result<char, String>
where
    I: Iterator<Item = io::Result<u8>>,
{
    let count = first
        .extra_utf8_bytes()
        .map_err(|_| format!("invalid utf8 first byte {:#04x}", first))?;

    let mut buffer = [first, 0, 0, 0];
    for index in 1..(count + 1) {
        buffer[index] = match iter.next() {
            None => return Err("too few bytes for utf8 character".to_string()),
            Some(Err(e)) => return Err(e.to_string()),
            Some(Ok(byte)) => byte,
        };
    }

    Utf8Char::from_array(buffer)
        .map_err(|_| format!("invalid utf8 sequence {:x?}", &buffer[..count + 1]))
        .map(|c| c.to_char())
}

/// Extention trait for a reader to allow it to produce `char` symbols.
///
/// Unbuffered readers will perform poorly because the iterator uses many
/// single-byte reads.
pub trait ReadSymbols: Read + Sized {
    /// Iterate over the utf8 encoded `char` symbols of this reader.
    fn symbols(self) -> Utf8Symbols<io::Bytes<Self>>;
}

impl<R: Read> ReadSymbols for R {
    fn symbols(self) -> Utf8Symbols<io::Bytes<Self>> {
        Utf8Symbols::new(self.bytes())
    }
}

/// Decode the whole of `reader` into `char` symbols.
///
/// No symbol is returned unless every byte decodes, so acceptance queries
/// built on this fail before any traversal begins.
pub fn decode_utf8<R: Read>(reader: R) -> Result<Vec<char>> {
    reader.symbols().collect()
}

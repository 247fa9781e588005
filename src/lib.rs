//Copyright (C) 2026 The golf-bayes Authors. All Rights Reserved.
//
//Redistribution and use in source and binary forms, with or without
//modification, are permitted provided that the following conditions
//are met:
//
// * Redistributions of source code must retain the above copyright
//   notice, this list of conditions and the following disclaimer.
//
// * Redistributions in binary form must reproduce the above copyright
//   notice, this list of conditions and the following disclaimer in
//   the documentation and/or other materials provided with the
//   distribution.
//
// * Neither the name of the golf-bayes project nor the names of its
//   contributors may be used to endorse or promote products derived
//   from this software without specific prior written permission.
//
//THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS
//"AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT
//LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR
//A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT
//OWNER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL,
//SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
//LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; Loss OF USE,
//DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY
//THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT
//(INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
//OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

//! golf-bayes: a categorical naive bayes classifier that predicts whether golf
//! gets played from the weather, temperature, humidity and wind.
//!
//! * [dataset]: features, labels and the shipped 14 record training set
//! * [naive_bayes]: priors, smoothed likelihoods and prediction
//! * [stats]: label counts over a training set
//! * [input]: loading training sets from delimited text
//! * [config]: classifier settings
//!
//! [dataset]: dataset/index.html
//! [naive_bayes]: naive_bayes/index.html
//! [stats]: stats/index.html
//! [input]: input/index.html
//! [config]: config/index.html

extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod config;
pub mod dataset;
pub mod errors;
pub mod input;
pub mod naive_bayes;
pub mod stats;

// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod builder;
mod flusher;
mod log_impl;

pub use builder::Builder;
pub use builder::DEFAULT_FLUSH_INTERVAL;
pub use builder::DEFAULT_LOG_FILE;
pub use builder::builder;
pub(crate) use builder::console_and_file;
pub use builder::default_sinks;
pub use log_impl::Logger;

#[cfg(test)]
mod tests;

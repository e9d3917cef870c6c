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

use crate::Error;
use crate::layout::Layout;
use crate::record::Record;

/// A layout that emits only the message body.
///
/// Debug channels add their own decorations, so this is what
/// [`Channel`](crate::append::Channel) uses by default.
///
/// # Examples
///
/// ```
/// use logmux::layout::MessageLayout;
///
/// let layout = MessageLayout::default();
/// ```
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct MessageLayout {}

impl Layout for MessageLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        Ok(record.args().to_string().into_bytes())
    }
}

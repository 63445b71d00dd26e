mod lookup;
mod support;

pub struct Version(pub &'static str);

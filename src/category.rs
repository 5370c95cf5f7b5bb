use std::fmt;
use std::str::FromStr;

/// The kinds of resource the service knows how to file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Personal,
    Research,
    Shopping,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Personal, Category::Research, Category::Shopping];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Research => "research",
            Category::Shopping => "shopping",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personal" => Ok(Category::Personal),
            "research" => Ok(Category::Research),
            "shopping" => Ok(Category::Shopping),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

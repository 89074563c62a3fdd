use clap::{Args, Parser, Subcommand, ValueEnum};
use placezapp::model::{Category, PlaceInput, PriceRange, Status};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "placez", bin_name = "placez", version)]
#[command(
    about = "Keep a catalog of places you have visited, planned and wished for",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text, help_heading = "Options")]
    pub output: OutputFormat,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in to the catalog
    #[command(display_order = 1)]
    Login {
        username: String,

        /// Password (read from stdin when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// End the current session
    #[command(display_order = 2)]
    Logout,

    /// Show who is logged in
    #[command(display_order = 3)]
    Whoami,

    /// List places (filter, search, sort, page)
    #[command(alias = "ls", display_order = 10)]
    List(ListArgs),

    /// Show one place in full
    #[command(alias = "v", display_order = 11)]
    View { id: String },

    /// Add a new place
    #[command(alias = "n", display_order = 12)]
    Add(AddArgs),

    /// Change fields of a place; omitted fields keep their value
    #[command(alias = "e", display_order = 13)]
    Edit {
        id: String,

        #[command(flatten)]
        fields: EditArgs,
    },

    /// Delete one or more places
    #[command(alias = "rm", display_order = 14)]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Catalog statistics
    #[command(display_order = 20)]
    Stats,

    /// Clear all places and restore the sample data
    #[command(display_order = 21)]
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Category (beach, mountain, city, historical, forest, or all)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Status (visited, planned, wishlist, or all)
    #[arg(long)]
    pub status: Option<String>,

    /// Search name, description, location and category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort by name, rating, visitors or date
    #[arg(long)]
    pub sort: Option<String>,

    /// Price range ($ to $$$$, or all)
    #[arg(long)]
    pub price: Option<String>,

    /// Page number, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: String,

    #[arg(long)]
    pub category: Category,

    #[arg(long)]
    pub location: String,

    /// Rating from 1 to 5
    #[arg(long)]
    pub rating: f64,

    #[arg(long, default_value_t = 0)]
    pub visitors: u64,

    #[arg(long)]
    pub status: Status,

    /// Price range: $, $$, $$$ or $$$$
    #[arg(long)]
    pub price: PriceRange,

    #[arg(long)]
    pub best_time: String,

    /// Image URL
    #[arg(long)]
    pub image: String,

    /// Amenity (repeatable)
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,
}

impl From<AddArgs> for PlaceInput {
    fn from(args: AddArgs) -> Self {
        PlaceInput {
            name: args.name,
            description: args.description,
            category: args.category,
            location: args.location,
            rating: args.rating,
            visitors: args.visitors,
            status: args.status,
            price_range: args.price,
            best_time: args.best_time,
            image: args.image,
            amenities: args.amenities,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct EditArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub category: Option<Category>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub rating: Option<f64>,

    #[arg(long)]
    pub visitors: Option<u64>,

    #[arg(long)]
    pub status: Option<Status>,

    #[arg(long)]
    pub price: Option<PriceRange>,

    #[arg(long)]
    pub best_time: Option<String>,

    #[arg(long)]
    pub image: Option<String>,

    /// Replaces the amenity list when given (repeatable)
    #[arg(long = "amenity")]
    pub amenities: Option<Vec<String>>,
}

impl EditArgs {
    /// Overlays the given flags on the current values.
    pub fn merge_into(self, mut input: PlaceInput) -> PlaceInput {
        if let Some(v) = self.name {
            input.name = v;
        }
        if let Some(v) = self.description {
            input.description = v;
        }
        if let Some(v) = self.category {
            input.category = v;
        }
        if let Some(v) = self.location {
            input.location = v;
        }
        if let Some(v) = self.rating {
            input.rating = v;
        }
        if let Some(v) = self.visitors {
            input.visitors = v;
        }
        if let Some(v) = self.status {
            input.status = v;
        }
        if let Some(v) = self.price {
            input.price_range = v;
        }
        if let Some(v) = self.best_time {
            input.best_time = v;
        }
        if let Some(v) = self.image {
            input.image = v;
        }
        if let Some(v) = self.amenities {
            input.amenities = v;
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn naked_invocation_has_no_command() {
        let cli = parse(&["placez"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.output, OutputFormat::Text);
    }

    #[test]
    fn list_flags_parse() {
        let cli = parse(&[
            "placez", "list", "--category", "beach", "--sort", "rating", "--page", "2", "--output",
            "json",
        ]);
        assert_eq!(cli.output, OutputFormat::Json);
        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.category.as_deref(), Some("beach"));
                assert_eq!(args.sort.as_deref(), Some("rating"));
                assert_eq!(args.page, 2);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn add_parses_vocabularies() {
        let cli = parse(&[
            "placez",
            "add",
            "--name",
            "Kyoto",
            "--description",
            "Temples",
            "--category",
            "historical",
            "--location",
            "Japan",
            "--rating",
            "4.5",
            "--status",
            "wishlist",
            "--price",
            "$$$",
            "--best-time",
            "Spring",
            "--image",
            "https://example.com/k.jpg",
            "--amenity",
            "Tea",
            "--amenity",
            "Gardens",
        ]);
        let Some(Commands::Add(args)) = cli.command else {
            panic!("expected add");
        };
        let input = PlaceInput::from(args);
        assert_eq!(input.category, Category::Historical);
        assert_eq!(input.price_range, PriceRange::Expensive);
        assert_eq!(input.amenities, vec!["Tea", "Gardens"]);
        assert_eq!(input.visitors, 0);
    }

    #[test]
    fn add_rejects_unknown_category() {
        assert!(Cli::try_parse_from([
            "placez",
            "add",
            "--name",
            "x",
            "--description",
            "x",
            "--category",
            "desert",
            "--location",
            "x",
            "--rating",
            "3",
            "--status",
            "planned",
            "--price",
            "$",
            "--best-time",
            "x",
            "--image",
            "https://example.com",
        ])
        .is_err());
    }

    #[test]
    fn edit_merges_only_given_flags() {
        let cli = parse(&["placez", "edit", "3", "--rating", "3.5", "--status", "visited"]);
        let Some(Commands::Edit { id, fields }) = cli.command else {
            panic!("expected edit");
        };
        assert_eq!(id, "3");

        let current = placezapp::seed::sample_places()[2].to_input();
        let merged = fields.merge_into(current.clone());
        assert_eq!(merged.rating, 3.5);
        assert_eq!(merged.status, Status::Visited);
        assert_eq!(merged.name, current.name);
        assert_eq!(merged.amenities, current.amenities);
    }
}

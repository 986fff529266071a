pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod tabs;
pub mod textarea;

pub use badge::Badge;
pub use button::Button;
pub use card::{Card, CardContent, CardHeader, CardTitle};
pub use input::Input;
pub use tabs::{Tabs, TabsContent, TabsList, TabsTrigger};
pub use textarea::Textarea;

mod make_box;
mod make_contour;
mod make_face;
mod make_object;
mod make_part;

pub use make_box::MakeBox;
pub use make_contour::MakeContour;
pub use make_face::MakeFace;
pub use make_object::MakeObject;
pub use make_part::MakePart;

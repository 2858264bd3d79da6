//! Page arrangement as ordered section lists.
//!
//! The positioning editor lets users drag sections around. The resulting order is the source of
//! truth while editing, and the persisted boolean flags are derived from it.

/// Top-level sections, stacked vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Section {
	Header,
	Wrapper,
}

/// Sections inside the wrapper, laid out horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum WrapperSection {
	Sidebar,
	#[display("Main Content")]
	Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutFlags {
	pub header_on_top: bool,
	pub sidebar_on_left: bool,
}

/// Moves the item at `from` so that it ends up at `to`. Out-of-range indices leave the list as is.
pub fn reorder<T: Clone>(list: &[T], from: usize, to: usize) -> Vec<T> {
	let mut reordered = list.to_vec();
	if from >= list.len() || to >= list.len() {
		return reordered;
	}
	let moved = reordered.remove(from);
	reordered.insert(to, moved);
	reordered
}

pub fn sections(header_on_top: bool) -> [Section; 2] {
	if header_on_top {
		[Section::Header, Section::Wrapper]
	} else {
		[Section::Wrapper, Section::Header]
	}
}

pub fn wrapper_sections(sidebar_on_left: bool) -> [WrapperSection; 2] {
	if sidebar_on_left {
		[WrapperSection::Sidebar, WrapperSection::Main]
	} else {
		[WrapperSection::Main, WrapperSection::Sidebar]
	}
}

pub fn header_on_top(sections: &[Section]) -> bool {
	sections.first() == Some(&Section::Header)
}

pub fn sidebar_on_left(sections: &[WrapperSection]) -> bool {
	sections.first() == Some(&WrapperSection::Sidebar)
}

impl LayoutFlags {
	pub fn derive(sections: &[Section], wrapper: &[WrapperSection]) -> Self {
		Self {
			header_on_top: header_on_top(sections),
			sidebar_on_left: sidebar_on_left(wrapper),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reorder_moves_one_item() {
		assert_eq!(reorder(&[1, 2, 3, 4], 0, 2), vec![2, 3, 1, 4]);
		assert_eq!(reorder(&[1, 2, 3, 4], 3, 0), vec![4, 1, 2, 3]);
		assert_eq!(reorder(&[1, 2, 3], 1, 1), vec![1, 2, 3]);
	}

	#[test]
	fn reorder_ignores_out_of_range() {
		assert_eq!(reorder(&[1, 2], 5, 0), vec![1, 2]);
		assert_eq!(reorder(&[1, 2], 0, 2), vec![1, 2]);
	}

	#[test]
	fn dragging_header_down_moves_it_to_the_bottom() {
		let moved = reorder(&sections(true), 0, 1);
		assert_eq!(moved, [Section::Wrapper, Section::Header]);
		assert!(!header_on_top(&moved));
		assert_eq!(sections(header_on_top(&moved)).to_vec(), moved);
	}

	#[test]
	fn flags_follow_order() {
		let wrapper = reorder(&wrapper_sections(true), 1, 0);
		let flags = LayoutFlags::derive(&sections(true), &wrapper);
		assert_eq!(
			flags,
			LayoutFlags {
				header_on_top: true,
				sidebar_on_left: false
			}
		);
	}

	#[test]
	fn labels() {
		assert_eq!(WrapperSection::Main.to_string(), "Main Content");
		assert_eq!(Section::Header.to_string(), "Header");
	}
}

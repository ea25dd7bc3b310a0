//! Degree-of-separation colors and legend labels.

use crate::api::Path;

/// Colors assigned to degrees of separation, cycled past the tenth.
pub const PALETTE: [&str; 10] = [
	"#e11d48", // red
	"#f97316", // orange
	"#facc15", // yellow
	"#16a34a", // green
	"#2563eb", // blue
	"#7c3aed", // purple
	"#e27bb1", // pink
	"#B45309", // brown
	"#6b7280", // gray
	"#18181b", // dark gray
];

/// Node color for a degree of separation.
pub fn color_for(degree: usize) -> &'static str {
	PALETTE[degree % PALETTE.len()]
}

/// One label per position of the first path.
///
/// Other paths are ignored, so this only approximates the drawn graph when paths differ
/// in length.
pub fn get_graph_legend(paths: &[Path]) -> Vec<String> {
	let Some(first) = paths.first() else {
		return Vec::new();
	};
	let len = first.len();

	(0..len)
		.map(|i| match i {
			0 if len == 1 => "Start / target page".to_string(),
			0 => "Start page".to_string(),
			i if i == len - 1 => "Target page".to_string(),
			1 => "1 degree away".to_string(),
			i => format!("{i} degrees away"),
		})
		.collect()
}

/// Legend labels paired with their palette color.
pub fn legend_entries(paths: &[Path]) -> Vec<(String, &'static str)> {
	get_graph_legend(paths)
		.into_iter()
		.enumerate()
		.map(|(i, label)| (label, color_for(i)))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn single_page_path() {
		assert_eq!(get_graph_legend(&[vec![4]]), vec!["Start / target page"]);
	}

	#[test]
	fn labels_follow_first_path_only() {
		let legend = get_graph_legend(&[vec![0, 5, 4, 3], vec![0, 1, 2, 9, 8, 3]]);
		assert_eq!(
			legend,
			vec!["Start page", "1 degree away", "2 degrees away", "Target page"]
		);
	}

	#[test]
	fn direct_link_has_no_interior_labels() {
		assert_eq!(get_graph_legend(&[vec![0, 1]]), vec!["Start page", "Target page"]);
	}

	#[test]
	fn empty_paths_give_empty_legend() {
		assert!(get_graph_legend(&[]).is_empty());
	}

	#[test]
	fn palette_cycles() {
		assert_eq!(color_for(0), "#e11d48");
		assert_eq!(color_for(10), color_for(0));
		assert_eq!(color_for(13), "#16a34a");

		let long: Vec<usize> = (0..12).collect();
		let entries = legend_entries(&[long]);
		assert_eq!(entries[11].1, PALETTE[1]);
		assert_eq!(entries[11].0, "Target page");
	}
}

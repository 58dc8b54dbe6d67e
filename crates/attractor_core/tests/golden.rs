//! Regression pin for the Lorenz tube. Chaotic sensitivity rules out closed-form
//! expectations, so these buffers were recorded from the exact warmup and sampling
//! schedule (1000 warmup steps from (0, 1, 1), two sub-steps per sample).

use attractor_core::{build, Attractor, TubeSettings};

const GOLDEN_POSITIONS: [f32; 186] = [
    7.93532133102417, 29.960237503051758, 0.22395473718643188, 7.889618873596191, 29.963022232055664, 0.3128565847873688,
    7.798214435577393, 30.002784729003906, 0.32086387276649475, 7.752511978149414, 30.039762496948242, 0.23996931314468384,
    7.798214435577393, 30.036977767944336, 0.15106746554374695, 7.889618873596191, 29.997215270996094, 0.14306017756462097,
    6.366101264953613, 26.634170532226562, -0.279192179441452, 6.324095249176025, 26.640348434448242, -0.18865327537059784,
    6.233548641204834, 26.681495666503906, -0.1782463639974594, 6.185008525848389, 26.716463088989258, -0.25837835669517517,
    6.227014541625977, 26.710283279418945, -0.34891727566719055, 6.317561149597168, 26.66913604736328, -0.359324187040329,
    4.7270283699035645, 23.29417610168457, -0.6157752275466919, 4.6888861656188965, 23.303688049316406, -0.5238257050514221,
    4.599350452423096, 23.346336364746094, -0.5110005140304565, 4.547956466674805, 23.379472732543945, -0.5901248455047607,
    4.586098670959473, 23.36996078491211, -0.6820743083953857, 4.675634860992432, 23.327312469482422, -0.6948994994163513,
    3.0203559398651123, 19.945159912109375, -0.7844346165657043, 2.986232280731201, 19.95792007446289, -0.6913070678710938,
    2.8978681564331055, 20.00218391418457, -0.6760609745979309, 2.843627691268921, 20.033687591552734, -0.7539423108100891,
    2.877751111984253, 20.02092742919922, -0.8470698595046997, 2.9661152362823486, 19.976661682128906, -0.8623159527778625,
    1.248443841934204, 16.592084884643555, -0.7840359210968018, 1.2184786796569824, 16.607995986938477, -0.6899669766426086,
    1.131454586982727, 16.65398597717285, -0.6723139882087708, 1.0743956565856934, 16.684066772460938, -0.748729944229126,
    1.104360818862915, 16.66815757751465, -0.8427988886833191, 1.1913849115371704, 16.622167587280273, -0.860451877117157,
    -0.58624267578125, 13.239989280700684, -0.6136756539344788, -0.6119257211685181, 13.258928298950195, -0.518903911113739,
    -0.6974357962608337, 13.306750297546387, -0.49887537956237793, -0.7572628259658813, 13.33563232421875, -0.5736185908317566,
    -0.7315798401832581, 13.316692352294922, -0.6683903336524963, -0.6460697650909424, 13.268871307373047, -0.6884188652038574,
    -2.481135129928589, 9.893962860107422, -0.2726867198944092, -2.502429723739624, 9.91579532623291, -0.17745082080364227,
    -2.5862479209899902, 9.965542793273926, -0.15509557723999023, -2.648771286010742, 9.993456840515137, -0.2279762476682663,
    -2.627476930618286, 9.971624374389648, -0.3232121467590332, -2.54365873336792, 9.921876907348633, -0.34556737542152405,
    -4.433563232421875, 6.559153079986572, 0.23935577273368835, -4.450381278991699, 6.5837273597717285, 0.33481913805007935,
    -4.532327175140381, 6.635485649108887, 0.35943490266799927, -4.5974555015563965, 6.662669658660889, 0.2885873019695282,
    -4.580637454986572, 6.638095378875732, 0.1931239366531372, -4.498691558837891, 6.586337089538574, 0.16850817203521729,
    -6.440756797790527, 3.240755319595337, 0.9226293563842773, -6.453029632568359, 3.2679059505462646, 1.018087387084961,
    -6.532922744750977, 3.3217499256134033, 1.0448803901672363, -6.600543975830078, 3.348443031311035, 0.9762154221534729,
    -6.588271141052246, 3.3212924003601074, 0.8807573914527893, -6.508378028869629, 3.267448663711548, 0.8539643883705139,
    -8.499847412109375, -0.05599125474691391, 1.7770588397979736, -8.507525444030762, -0.02644180878996849, 1.8722842931747437,
    -8.585187911987305, 0.02954944781959057, 1.9011547565460205, -8.655172348022461, 0.05599125474691391, 1.8347997665405273,
    -8.647494316101074, 0.02644180878996849, 1.7395744323730469, -8.569831848144531, -0.02954944781959057, 1.71070396900177,
    7.843916893005371, 30.0, 0.23196202516555786, -8.577509880065918, 0.0, 1.8059293031692505,
];
const GOLDEN_NORMALS: [f32; 186] = [
    0.9140474796295166, -0.3976248800754547, -0.08007290214300156, 0.4570237398147583, -0.36977875232696533, 0.8089455962181091,
    -0.4570237398147583, 0.027846133336424828, 0.8890184760093689, -0.9140474796295166, 0.3976248800754547, 0.08007290214300156,
    -0.4570237398147583, 0.36977875232696533, -0.8089455962181091, 0.4570237398147583, -0.027846133336424828, -0.8890184760093689,
    0.9054654240608215, -0.41146320104599, -0.10406909883022308, 0.4854031503200531, -0.34967130422592163, 0.8013200163841248,
    -0.42006227374076843, 0.061791885644197464, 0.905389130115509, -0.9054654240608215, 0.41146320104599, 0.10406909883022308,
    -0.4854031503200531, 0.34967130422592163, -0.8013200163841248, 0.42006227374076843, -0.061791885644197464, -0.905389130115509,
    0.895358681678772, -0.42647889256477356, -0.12825189530849457, 0.5139364004135132, -0.3313668370246887, 0.7912429571151733,
    -0.3814222812652588, 0.09511204808950424, 0.9194948077201843, -0.895358681678772, 0.42647889256477356, 0.12825189530849457,
    -0.5139364004135132, 0.3313668370246887, -0.7912429571151733, 0.3814222812652588, -0.09511204808950424, -0.9194948077201843,
    0.8836413621902466, -0.4426437318325043, -0.15246134996414185, 0.5424052476882935, -0.31503283977508545, 0.7788137793540955,
    -0.3412361443042755, 0.12761087715625763, 0.9312751293182373, -0.8836413621902466, 0.4426437318325043, 0.15246134996414185,
    -0.5424052476882935, 0.31503283977508545, -0.7788137793540955, 0.3412361443042755, -0.12761087715625763, -0.9312751293182373,
    0.8702410459518433, -0.4599105417728424, -0.1765299290418625, 0.5705894231796265, -0.30081215500831604, 0.7641595005989075,
    -0.2996516227722168, 0.15909838676452637, 0.9406894445419312, -0.8702410459518433, 0.4599105417728424, 0.1765299290418625,
    -0.5705894231796265, 0.30081215500831604, -0.7641595005989075, 0.2996516227722168, -0.15909838676452637, -0.9406894445419312,
    0.8551007509231567, -0.4782138764858246, -0.2002851516008377, 0.5982706546783447, -0.2888203561306, 0.747432291507721,
    -0.2568301558494568, 0.1893935352563858, 0.9477174282073975, -0.8551007509231567, 0.4782138764858246, 0.2002851516008377,
    -0.5982706546783447, 0.2888203561306, -0.747432291507721, 0.2568301558494568, -0.1893935352563858, -0.9477174282073975,
    0.8381807208061218, -0.49747103452682495, -0.2235523909330368, 0.6252356171607971, -0.2791439890861511, 0.7288066148757935,
    -0.2129451334476471, 0.21832703053951263, 0.9523590207099915, -0.8381807208061218, 0.49747103452682495, 0.2235523909330368,
    -0.6252356171607971, 0.2791439890861511, -0.7288066148757935, 0.2129451334476471, -0.21832703053951263, -0.9523590207099915,
    0.8194594979286194, -0.517583429813385, -0.2461576610803604, 0.6512795686721802, -0.2718394100666046, 0.7084760069847107,
    -0.16817988455295563, 0.2457440048456192, 0.9546336531639099, -0.8194594979286194, 0.517583429813385, 0.2461576610803604,
    -0.6512795686721802, 0.2718394100666046, -0.7084760069847107, 0.16817988455295563, -0.2457440048456192, -0.9546336531639099,
    0.7989351153373718, -0.538438618183136, -0.26793015003204346, 0.6762095093727112, -0.26693230867385864, 0.686649739742279,
    -0.12272557616233826, 0.27150630950927734, 0.9545798897743225, -0.7989351153373718, 0.538438618183136, 0.26793015003204346,
    -0.6762095093727112, 0.26693230867385864, -0.686649739742279, 0.12272557616233826, -0.27150630950927734, -0.9545798897743225,
    0.7766256928443909, -0.5599125623703003, -0.28870487213134766, 0.6998466849327087, -0.2644180953502655, 0.6635493040084839,
    -0.07677897065877914, 0.2954944670200348, 0.9522541761398315, -0.7766256928443909, 0.5599125623703003, 0.28870487213134766,
    -0.6998466849327087, 0.2644180953502655, -0.6635493040084839, 0.07677897065877914, -0.2954944670200348, -0.9522541761398315,
    0.4056072235107422, 0.8960590362548828, 0.1804465800523758, -0.5171538591384888, -0.8283573985099792, 0.21535058319568634,
];

const TOLERANCE: f32 = 1e-3;

fn lorenz_settings() -> TubeSettings {
    TubeSettings::new(10, Attractor::Lorenz, 0.1, 0.02, 6)
}

fn assert_buffer_close(actual: &[f32], expected: &[f32], label: &str) {
    assert_eq!(actual.len(), expected.len(), "{} length", label);
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= TOLERANCE,
            "{}[{}]: got {}, expected {}",
            label,
            i,
            a,
            e
        );
    }
}

#[test]
fn lorenz_positions_match_recording() {
    let tube = build(lorenz_settings()).expect("tube");
    assert_buffer_close(tube.geometry().positions, &GOLDEN_POSITIONS, "positions");
}

#[test]
fn lorenz_normals_match_recording() {
    let tube = build(lorenz_settings()).expect("tube");
    assert_buffer_close(tube.geometry().normals, &GOLDEN_NORMALS, "normals");
}

#[test]
fn lorenz_indices_follow_ring_layout() {
    let tube = build(lorenz_settings()).expect("tube");
    let indices = tube.geometry().indices;
    assert_eq!(indices.len(), 9 * 6 * 6 + 6 * 6);
    assert_eq!(
        &indices[..12],
        &[0, 1, 6, 6, 1, 7, 1, 2, 7, 7, 2, 8]
    );
    // last quad of the first band wraps back to facet 0
    assert_eq!(&indices[30..36], &[5, 0, 11, 11, 0, 6]);
    let caps = &indices[9 * 6 * 6..];
    assert_eq!(&caps[..6], &[1, 0, 60, 2, 1, 60]);
    assert_eq!(&caps[18..24], &[54, 55, 61, 55, 56, 61]);
}

#[test]
fn lorenz_recording_is_stable_across_runs() {
    let a = build(lorenz_settings()).expect("tube").into_mesh();
    let b = build(lorenz_settings()).expect("tube").into_mesh();
    assert_eq!(a, b);
}

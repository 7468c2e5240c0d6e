//! Barycentric equatorial J2000 states of Pluto every 29 200 days (TT from
//! J2000), positions in AU and velocities in AU/day.

use super::TableEntry;

#[allow(clippy::excessive_precision)]
pub(super) static PLUTO_STATE_TABLE: [TableEntry; 51] = [
    TableEntry {
        tt: -730000.0,
        r: [-26.114927571238702, -14.372484338486029, 3.3860162352226255],
        v: [0.0016310386409595068, -0.002780873239919677, -0.0013562014486756821],
    },
    TableEntry {
        tt: -700800.0,
        r: [41.97345358825859, -0.4546736891796081, -12.77261725609709],
        v: [0.0007403890931717894, 0.0022807856759230823, 0.000487039177456407],
    },
    TableEntry {
        tt: -671600.0,
        r: [14.704607341750277, 44.270499834216096, 9.35389123412342],
        v: [-0.002097785152332792, 0.00021739948941688764, 0.0006989850688562027],
    },
    TableEntry {
        tt: -642400.0,
        r: [-29.44257097394365, -6.424845888845184, 6.86069945006813],
        v: [0.0008386533603165534, -0.0030799128263753737, -0.0012110828421544773],
    },
    TableEntry {
        tt: -613200.0,
        r: [39.44654039459434, -6.557974952009265, -13.913286155818366],
        v: [0.0011466247996083218, 0.00224493622271519, 0.00035380053299843795],
    },
    TableEntry {
        tt: -584000.0,
        r: [20.23029258590423, 43.264077459059855, 7.3814840683100185],
        v: [-0.0019698936954615793, 0.0005360854397985928, 0.0007598223665495509],
    },
    TableEntry {
        tt: -554800.0,
        r: [-30.65980727835569, 2.097648093354145, 9.881961465289827],
        v: [6.185618838731231e-05, -0.0031379487469466163, -0.0009957357488082933],
    },
    TableEntry {
        tt: -525600.0,
        r: [35.73554626528196, -12.586672118029783, -14.676891498404062],
        v: [0.0015749185827959285, 0.002134018028613414, 0.00019050218930337785],
    },
    TableEntry {
        tt: -496400.0,
        r: [25.47083049406477, 41.36966508895866, 5.217186546212184],
        v: [-0.0018066168163627118, 0.0008378396000444429, 0.0008047947614693287],
    },
    TableEntry {
        tt: -467200.0,
        r: [-29.846311225385904, 10.63633422579207, 12.297520724052175],
        v: [-0.0006269666725996655, -0.002995799024621893, -0.0007443552363332889],
    },
    TableEntry {
        tt: -438000.0,
        r: [30.773135493486315, -18.23737237883996, -14.945365269731143],
        v: [0.002011976958695819, 0.0019300351286321692, -4.468114076775353e-06],
    },
    TableEntry {
        tt: -408800.0,
        r: [30.24182857161367, 38.65835780031903, 2.9394264725531785],
        v: [-0.0016109708376920756, 0.0011179080216436425, 0.0008332790966716955],
    },
    TableEntry {
        tt: -379600.0,
        r: [-27.282588066369023, 18.64673238411321, 14.024703907454736],
        v: [-0.0011862290441369062, -0.002711299103018587, -0.0004876204396538368],
    },
    TableEntry {
        tt: -350400.0,
        r: [24.51933777353982, -23.249949524528343, -14.628252688583178],
        v: [0.0024389031971246804, 0.0016064251695882756, -0.0002337842330953096],
    },
    TableEntry {
        tt: -321200.0,
        r: [34.503776813801025, 35.12344426084017, 0.556602511743552],
        v: [-0.0013827514226748897, 0.0013773363133764852, 0.0008456178711509291],
    },
    TableEntry {
        tt: -292000.0,
        r: [-23.27667243098443, 25.823333452183334, 15.057304986208305],
        v: [-0.0016128009134256276, -0.00233891146829337, -0.00024328325617535503],
    },
    TableEntry {
        tt: -262800.0,
        r: [17.056326781397573, -27.18044535414204, -13.608827380430764],
        v: [0.0028187215570976043, 0.0011421806575903476, -0.0004927985831552267],
    },
    TableEntry {
        tt: -233600.0,
        r: [38.09284604919498, 30.874896993473477, -1.8461277984616278],
        v: [-0.0011243086298886437, 0.001611433635904308, 0.0008409315406729233],
    },
    TableEntry {
        tt: -204400.0,
        r: [-18.202061916981005, 31.932836367148763, 15.438303657925461],
        v: [-0.0019142417871722858, -0.00192135069766695, -2.248057782694733e-05],
    },
    TableEntry {
        tt: -175200.0,
        r: [8.527295255635815, -29.612544403159344, -11.802543052397999],
        v: [0.0030965573771794576, 0.0005164181274178705, -0.0007716575693448778],
    },
    TableEntry {
        tt: -146000.0,
        r: [40.95400745105587, 25.9024515458168, -4.257592069587477],
        v: [-0.0008331460264707307, 0.001819569856633857, 0.0008183856400580144],
    },
    TableEntry {
        tt: -116800.0,
        r: [-12.331379362478259, 36.876598755365166, 15.21501223489429],
        v: [-0.002109206383081943, -0.0014855385288316952, 0.0001720390454002865],
    },
    TableEntry {
        tt: -87600.0,
        r: [-0.6392440570630287, -30.01589657248622, -9.170402384093393],
        v: [0.0031962985898310015, -0.0002589436440413142, -0.0010435849629363938],
    },
    TableEntry {
        tt: -58400.0,
        r: [42.93837152412054, 20.351651980576285, -6.585123353621894],
        v: [-0.0005113914319330603, 0.0019958812226347194, 0.0007766698059675083],
    },
    TableEntry {
        tt: -29200.0,
        r: [-5.970169052960413, 40.606692664188074, 14.467930113803472],
        v: [-0.002212321929281332, -0.0010505556092218035, 0.00033877304060774606],
    },
    TableEntry {
        tt: 0.0,
        r: [-9.882489409085187, -27.981515457544347, -5.754614330515408],
        v: [0.003034129306353884, -0.001134351464228281, -0.0012681622246898815],
    },
    TableEntry {
        tt: 29200.0,
        r: [43.955119442823644, 14.220268855324274, -8.805546863295426],
        v: [-0.00015482077239158226, 0.002136447929413849, 0.0007133924318179984],
    },
    TableEntry {
        tt: 58400.0,
        r: [0.6834760818129743, 43.09966248475381, 13.245546763287576],
        v: [-0.0022397977358169217, -0.0006255575037389297, 0.0004796492686254875],
    },
    TableEntry {
        tt: 87600.0,
        r: [-18.278404074138063, -23.31244963991357, -1.769957024217467],
        v: [0.002564906136815022, -0.0019869016030503667, -0.0013931586269178653],
    },
    TableEntry {
        tt: 116800.0,
        r: [43.86590252381913, 7.7025758570540654, -10.813341182070232],
        v: [0.00023382708173917536, 0.0022322237346374114, 0.000626452271662406],
    },
    TableEntry {
        tt: 146000.0,
        r: [7.392058758633406, 44.38874553111416, 11.632511560129785],
        v: [-0.0022016818929574086, -0.00021871156886289775, 0.0005952892715473604],
    },
    TableEntry {
        tt: 175200.0,
        r: [-24.972691088789333, -16.203261271304367, 2.4664424114651187],
        v: [0.0018185733092324434, -0.0026688353582709798, -0.0013815921354421346],
    },
    TableEntry {
        tt: 204400.0,
        r: [42.53029977115194, 0.839996720496705, -12.557575716012176],
        v: [0.000658920263456046, 0.0022729928017463344, 0.0005113321109417733],
    },
    TableEntry {
        tt: 233600.0,
        r: [13.992491064690194, 44.46561567705638, 9.671448532088482],
        v: [-0.0021088046926561435, 0.0001676344224255802, 0.0006880617857903784],
    },
    TableEntry {
        tt: 262800.0,
        r: [-29.180175942678392, -7.369255043181524, 6.494094612671876],
        v: [0.0009284752799590108, -0.003059466476460783, -0.0012356450223074483],
    },
    TableEntry {
        tt: 292000.0,
        r: [39.8393331371953, -6.078035985865904, -13.910258226394712],
        v: [0.0011134520573631136, 0.0022429549046428174, 0.0003651444706156686],
    },
    TableEntry {
        tt: 321200.0,
        r: [20.289770782573264, 43.41150155745287, 7.448377580080941],
        v: [-0.001966881539670604, 0.0005290755184723285, 0.0007584273415300396],
    },
    TableEntry {
        tt: 350400.0,
        r: [-30.673032045813887, 2.319873329876941, 9.97432095030842],
        v: [4.280399877032158e-05, -0.0031371676552237274, -0.0009933579363457612],
    },
    TableEntry {
        tt: 379600.0,
        r: [35.63047813806217, -12.893963602911192, -14.776751631654697],
        v: [0.0015956716341140916, 0.002120350505627554, 0.00018152127158865114],
    },
    TableEntry {
        tt: 408800.0,
        r: [26.134633389992942, 41.23045191236471, 5.006196627585584],
        v: [-0.0017826810048419722, 0.000865478760188192, 0.0008082442906873973],
    },
    TableEntry {
        tt: 438000.0,
        r: [-29.582315467904696, 11.856244660133394, 12.629038330470042],
        v: [-0.00071671972143356, -0.0029620972454808985, -0.0007098306754894235],
    },
    TableEntry {
        tt: 467200.0,
        r: [29.911771442593402, -19.152845707417686, -15.01174040668802],
        v: [0.0020827312716783257, 0.0018801840622168558, -4.038010676633287e-05],
    },
    TableEntry {
        tt: 496400.0,
        r: [31.374717495542857, 38.05249777321443, 2.434552255009717],
        v: [-0.0015588483059275206, 0.0011731746146645655, 0.0008371316223940296],
    },
    TableEntry {
        tt: 525600.0,
        r: [-26.359484448742652, 20.658053298627074, 14.413677805645447],
        v: [-0.001310692495526566, -0.0026197049609752074, -0.0004238313910322659],
    },
    TableEntry {
        tt: 554800.0,
        r: [22.59826824446173, -24.508465720641155, -14.484922232588772],
        v: [0.002549980327988261, 0.0014881256298009049, -0.00030401947915564267],
    },
    TableEntry {
        tt: 584000.0,
        r: [35.875401615411526, 33.89918926871321, -0.22206450387539803],
        v: [-0.0012985850474792123, 0.00145227648530581, 0.0008461337420377062],
    },
    TableEntry {
        tt: 613200.0,
        r: [-21.541256893550976, 28.202558783288673, 15.322635678055399],
        v: [-0.0017347918638253583, -0.002191036171471484, -0.0001618686380298599],
    },
    TableEntry {
        tt: 642400.0,
        r: [13.979804184021576, -28.338280234240194, -13.084803872306496],
        v: [0.002936870787657555, 0.0009228670323006222, -0.0005976176680567075],
    },
    TableEntry {
        tt: 671600.0,
        r: [39.52232343152605, 28.941623985697873, -2.8718186004634],
        v: [-0.001002978210650801, 0.0016978155738471337, 0.0008339144443339709],
    },
    TableEntry {
        tt: 700800.0,
        r: [-15.57995424626358, 34.39873853185879, 15.467120388078044],
        v: [-0.002014432706736829, -0.0017225252042978665, 6.901559002005742e-05],
    },
    TableEntry {
        tt: 730000.0,
        r: [4.247593174665991, -30.11424220978025, -10.706838862810763],
        v: [0.0031687498362743087, 0.00016519017253216955, -0.0009048413818732264],
    },
];
